//! Integration tests for stored-data compatibility and the sealed container.

mod end_to_end;
mod legacy;
