pub mod backfill;

#[cfg(test)]
mod tests;
