mod controller;
mod sleep_timer;
mod support;
