/// Generates a `get` command struct and handler that fetches one entity by id
/// and prints it as JSON.
macro_rules! define_get_command {
    ($command:ident, $fn_name:ident, $id_type:ty, $accessor:ident) => {
        #[derive(Debug, clap::Args)]
        pub struct $command {
            #[arg(long)]
            pub id: i64,
        }

        pub async fn $fn_name(
            client: &crate::infrastructure::client::ReadstatsClient,
            command: $command,
        ) -> anyhow::Result<()> {
            let entity = client.$accessor().get(<$id_type>::new(command.id)).await?;
            super::print_json(&entity)
        }
    };
}

/// Generates a `delete` command struct and handler that removes one entity by id.
macro_rules! define_delete_command {
    ($command:ident, $fn_name:ident, $id_type:ty, $accessor:ident, $label:literal) => {
        #[derive(Debug, clap::Args)]
        pub struct $command {
            #[arg(long)]
            pub id: i64,
        }

        pub async fn $fn_name(
            client: &crate::infrastructure::client::ReadstatsClient,
            command: $command,
        ) -> anyhow::Result<()> {
            client
                .$accessor()
                .delete(<$id_type>::new(command.id))
                .await?;
            eprintln!(concat!("Deleted ", $label, " {}."), command.id);
            Ok(())
        }
    };
}

pub(crate) use define_delete_command;
pub(crate) use define_get_command;
