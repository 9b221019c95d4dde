pub mod directory;
pub mod matching;

pub use directory::SpecialistDirectoryService;
