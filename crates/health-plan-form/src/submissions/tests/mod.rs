mod common;
mod naming;
