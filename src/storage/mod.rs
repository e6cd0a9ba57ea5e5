//! Object-storage destinations
//!
//! Upload targets behind one `Destination` handle: Google Cloud Storage
//! (`gs://`), Amazon S3 (`s3://`), or a local directory. Credentials are
//! resolved from the ambient environment by the `object_store` builders;
//! this crate never sees them.

mod destination;

pub use destination::Destination;
