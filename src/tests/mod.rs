//! Test modules, grouped by the property they cover


mod codec_tests;
mod instance_tests;
