pub mod lookup;
pub mod pager;
pub mod render;
pub mod wordlist;
pub mod youdao;
