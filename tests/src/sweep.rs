mod dns;
mod integration;
