pub mod generation_repository;
pub mod google_tts_repository;
pub mod openai_generation_repository;
pub mod s3_storage_repository;
pub mod storage_repository;
pub mod tts_repository;

pub use generation_repository::GenerationRepository;
pub use google_tts_repository::GoogleTtsRepository;
pub use openai_generation_repository::OpenAiGenerationRepository;
pub use s3_storage_repository::S3StorageRepository;
pub use storage_repository::StorageRepository;
pub use tts_repository::TtsRepository;
