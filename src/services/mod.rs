// src/services/mod.rs
//
// Résumé handling and the selection pass, shared by the HR and candidate modules

pub mod extractor;
pub mod resume_files;
pub mod scoring;
pub mod selection;

pub use extractor::{PdfTextExtractor, TextExtractor};
pub use resume_files::ResumeFiles;
