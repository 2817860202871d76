mod find;
mod helpers;
