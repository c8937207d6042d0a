mod cantodict_tests;
