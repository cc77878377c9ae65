mod tests_writer;
