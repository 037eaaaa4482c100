pub mod protocol;
pub mod storyteller;

pub mod prompt_builder;
pub mod llm_client;
pub mod image_client;
pub mod choice_parser;
