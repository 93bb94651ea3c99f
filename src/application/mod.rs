// Application layer - Use cases over the position dataset
pub mod dataset_assembler;
pub mod displacement_service;
pub mod map_service;
pub mod position_source;
