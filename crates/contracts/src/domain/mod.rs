pub mod a001_kido_chat;
