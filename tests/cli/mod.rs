mod config;
mod errors;
mod heapsort;
mod labyrinth;
mod logging;
mod show;
mod support;
mod traversal;
