use clap::Args;

use service::api::room::{CreateRoom, DeleteRoom, GetRoom, SearchRooms, UpdateRoom};

use crate::op::Op;

crate::command_enum! {
    (New, CreateRoom),
    (Get, GetRoom),
    (Update, UpdateRoom),
    (Remove, DeleteRoom),
    (Find, SearchRooms),
}

crate::adapter_ops!(CreateRoom, GetRoom, UpdateRoom, DeleteRoom, SearchRooms);

pub type RoomCommand = Command;

/// Create, inspect, change and delete rooms
#[derive(Args, Debug, Clone)]
pub struct Room {
    #[command(subcommand)]
    pub command: RoomCommand,
}

#[async_trait::async_trait]
impl Op for Room {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
