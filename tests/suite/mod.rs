mod concurrency;
mod fold;
mod formatting;
