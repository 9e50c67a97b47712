pub mod display_name;
pub mod email;
pub mod matriculation_number;
pub mod password;
pub mod student;
