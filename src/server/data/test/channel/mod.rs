use crate::server::data::channel::ChannelRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_server_ids;
