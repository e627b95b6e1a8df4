mod checkout_file;
