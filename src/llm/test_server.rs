use std::{
    io::{
        Read,
        Write,
    },
    net::{
        TcpListener,
        TcpStream,
    },
    sync::mpsc,
    thread,
};

/// Minimal one-shot HTTP endpoint for fetcher tests. Serves `count`
/// connections with a fixed status + body and records each raw request.
pub struct StubEndpoint {
    pub url: String,
    requests: mpsc::Receiver<String>,
}

impl StubEndpoint {
    pub fn start(status: u16, body: &str, count: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub endpoint");
        let url = format!("http://{}/v1/chat/completions", listener.local_addr().unwrap());

        let (tx, rx) = mpsc::channel();
        let body = body.to_string();

        thread::spawn(move || {
            for _ in 0..count {
                let Ok((mut stream, _)) = listener.accept() else {
                    break;
                };

                let request = read_request(&mut stream);
                // Record before responding so the request is visible by the
                // time the client call returns.
                let _ = tx.send(request);

                let response = format!(
                    "HTTP/1.1 {status} Stub\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { url, requests: rx }
    }

    pub fn recorded_requests(&self) -> Vec<String> {
        self.requests.try_iter().collect()
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                buffer.extend_from_slice(&chunk[..n]);
                if let Some(request) = complete_request(&buffer) {
                    return request;
                }
            }
            Err(_) => break,
        }
    }

    String::from_utf8_lossy(&buffer).into_owned()
}

// A request is complete once the headers have arrived and the body spans
// Content-Length bytes.
fn complete_request(buffer: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buffer);
    let (head, body) = text.split_once("\r\n\r\n")?;

    let content_length = head.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.eq_ignore_ascii_case("content-length") {
            value.trim().parse::<usize>().ok()
        } else {
            None
        }
    })?;

    if body.len() >= content_length {
        Some(text.into_owned())
    } else {
        None
    }
}
