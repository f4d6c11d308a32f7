use rand::{rngs::OsRng, RngCore};
use std::io::{Chain, Cursor, Read};

const CRLF: &[u8] = b"\r\n";

/// Header side of a `multipart/form-data` body. Text parts are kept in
/// memory; the single file part is streamed from its reader.
pub struct Form {
    boundary: String,
    head: Vec<u8>,
}

/// Streamed request body with its exact length.
pub struct Body<R> {
    pub content_type: String,
    pub len: u64,
    pub reader: Chain<Chain<Cursor<Vec<u8>>, R>, Cursor<Vec<u8>>>,
}

impl Default for Form {
    fn default() -> Self {
        Form::new()
    }
}

impl Form {
    pub fn new() -> Self {
        let mut bytes = [0u8; 16];
        OsRng.fill_bytes(&mut bytes);
        let hex = bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>();
        Form::with_boundary(format!("------------------------{}", hex))
    }

    pub fn with_boundary(boundary: String) -> Self {
        Form {
            boundary,
            head: Vec::new(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn text(&mut self, name: &str, value: &str) -> &mut Self {
        self.open_part();
        self.head.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"", escape(name)).as_bytes(),
        );
        self.head.extend_from_slice(CRLF);
        self.head.extend_from_slice(CRLF);
        self.head.extend_from_slice(value.as_bytes());
        self.head.extend_from_slice(CRLF);
        self
    }

    /// Closes the form with a file part whose `len` bytes come from `data`.
    pub fn file<R: Read>(
        mut self,
        name: &str,
        filename: &str,
        mime: &str,
        data: R,
        len: u64,
    ) -> Body<std::io::Take<R>> {
        self.open_part();
        self.head.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"",
                escape(name),
                escape(filename)
            )
            .as_bytes(),
        );
        self.head.extend_from_slice(CRLF);
        self.head
            .extend_from_slice(format!("Content-Type: {}", mime).as_bytes());
        self.head.extend_from_slice(CRLF);
        self.head.extend_from_slice(CRLF);

        let mut tail = CRLF.to_vec();
        tail.extend_from_slice(format!("--{}--", self.boundary).as_bytes());
        tail.extend_from_slice(CRLF);

        let content_type = format!("multipart/form-data; boundary={}", self.boundary);
        let total = self.head.len() as u64 + len + tail.len() as u64;
        Body {
            content_type,
            len: total,
            reader: Cursor::new(self.head)
                .chain(data.take(len))
                .chain(Cursor::new(tail)),
        }
    }

    fn open_part(&mut self) {
        self.head
            .extend_from_slice(format!("--{}", self.boundary).as_bytes());
        self.head.extend_from_slice(CRLF);
    }
}

fn escape(s: &str) -> String {
    s.replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
