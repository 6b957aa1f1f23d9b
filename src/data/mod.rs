pub mod employee;
pub mod geojson;
pub mod ids;
pub mod university;
