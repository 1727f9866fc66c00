// Lazily compiled, process-wide regular expressions

mod cache;
