mod ja_transform_tests;
