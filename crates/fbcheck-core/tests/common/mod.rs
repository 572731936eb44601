pub mod rtdb_server;
