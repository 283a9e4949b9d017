mod download_test;
