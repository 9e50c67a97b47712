mod helpers;
mod login;
mod register;
mod students;
