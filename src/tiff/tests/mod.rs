//! Unit tests for the TIFF parser


mod byte_order_tests;
mod document_tests;
mod ifd_tests;
mod registry_tests;
