//! Test modules relocated from implementation files.
