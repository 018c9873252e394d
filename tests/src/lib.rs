#[cfg(test)]
mod cursor_lifecycle_test;
