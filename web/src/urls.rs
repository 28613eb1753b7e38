//! Room and endpoint URLs derived from the page location. The server routes
//! game pages at `/room/{id}` and sockets at `/ws/{id}`.

pub(crate) fn room_id_from_path(path: &str) -> String {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("")
        .to_string()
}

pub(crate) fn ws_url(protocol: &str, host: &str, room_id: &str) -> String {
    let scheme = if protocol.eq_ignore_ascii_case("https:") {
        "wss"
    } else {
        "ws"
    };
    format!("{scheme}://{host}/ws/{room_id}")
}

/// What goes into the share field: this page, without query or hash.
pub(crate) fn share_url(origin: &str, path: &str) -> String {
    format!("{origin}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_id_is_the_last_path_segment() {
        assert_eq!(room_id_from_path("/room/abc123"), "abc123");
        assert_eq!(room_id_from_path("/room/abc123/"), "abc123");
        assert_eq!(room_id_from_path(""), "");
    }

    #[test]
    fn ws_scheme_follows_the_page_protocol() {
        assert_eq!(
            ws_url("https:", "go.example.com", "abc"),
            "wss://go.example.com/ws/abc"
        );
        assert_eq!(
            ws_url("http:", "localhost:8080", "abc"),
            "ws://localhost:8080/ws/abc"
        );
    }

    #[test]
    fn share_url_joins_origin_and_path() {
        assert_eq!(
            share_url("https://go.example.com", "/room/abc"),
            "https://go.example.com/room/abc"
        );
    }
}
