mod tests_digest;
