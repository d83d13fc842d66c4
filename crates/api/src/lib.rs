//! HTTP host: static site serving plus the JSON API under `/api`.

pub mod app;
