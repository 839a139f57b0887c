mod helpers;
mod http;
