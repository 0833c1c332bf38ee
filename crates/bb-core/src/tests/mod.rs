mod envelope;
mod models;
