pub mod classify;
pub mod dispatch;
pub mod health;
pub mod history;
pub mod serve;
pub mod theme;
