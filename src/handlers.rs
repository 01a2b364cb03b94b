// -- 用户资源的处理函数
pub mod user;
