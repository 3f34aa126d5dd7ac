pub mod city;
pub mod equipment_event;
pub mod event_code;
pub mod processing_result;
pub mod trip;
