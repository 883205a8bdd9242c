pub mod booking_mapper;
pub mod slot_mapper;
pub mod workflow_mapper;
