mod health;
mod helper;
mod subscriber;
