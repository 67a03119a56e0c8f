mod category;
mod channel;
