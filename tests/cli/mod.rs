mod books;
mod capture;
mod chrome;
mod elfeed;
mod history;
mod misc;
mod support;
mod translit;
