mod export;
mod init;
mod logging;
mod plan;
mod run;
mod summary;
mod support;
mod tracks;
mod verdict;
