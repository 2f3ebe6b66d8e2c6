mod poll;
mod service;
