mod role;
mod subscription_status;
mod user;
