mod logging;
mod scenarios;
