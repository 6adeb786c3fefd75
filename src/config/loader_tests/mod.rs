mod in_memory;

mod version_tests;
