use super::dto::ConnectionDto;
use super::models::{ConnectionRemoteState, ConnectionResourceModel};

fn last_segment(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|segment| !segment.is_empty())
}

pub fn convert_from_connection_dto(dto: &ConnectionDto) -> ConnectionRemoteState {
    let id = if dto.name.is_empty() {
        last_segment(&dto.id).unwrap_or_default().to_string()
    } else {
        dto.name.clone()
    };

    ConnectionRemoteState {
        id,
        name: last_segment(&dto.properties.api_id).map(str::to_string),
        display_name: dto.properties.display_name.clone(),
        status: dto
            .properties
            .statuses
            .iter()
            .map(|status| status.status.clone())
            .collect(),
    }
}

impl ConnectionResourceModel {
    /// Overwrite the service-owned fields. The environment is addressing
    /// input and is never taken from the response.
    pub fn sync_from_remote(mut self, remote: ConnectionRemoteState) -> Self {
        self.id = Some(remote.id);
        if let Some(name) = remote.name {
            self.name = name;
        }
        self.display_name = Some(remote.display_name);
        self.status = remote.status;
        self
    }
}
