use crate::core::ports::modulation::ModulationSource;
use std::io::ErrorKind;
use std::net::{ToSocketAddrs, UdpSocket};

/// Modulation source fed by UDP datagrams carrying an ASCII float each.
///
/// The socket is non-blocking; a poll drains whatever arrived since the
/// last frame and keeps the newest parseable value. Malformed datagrams
/// are skipped. Before any datagram arrives the value is 0.0.
pub struct UdpModulationSource {
    socket: UdpSocket,
    last_received: f64,
}

impl UdpModulationSource {
    pub fn bind(addr: impl ToSocketAddrs) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(addr)?;
        socket.set_nonblocking(true)?;

        Ok(Self {
            socket,
            last_received: 0.0,
        })
    }
}

impl ModulationSource for UdpModulationSource {
    fn poll(&mut self) -> f64 {
        let mut datagram = [0u8; 256];

        loop {
            match self.socket.recv(&mut datagram) {
                Ok(received) => {
                    if let Ok(text) = std::str::from_utf8(&datagram[..received]) {
                        if let Ok(value) = text.trim().parse::<f64>() {
                            self.last_received = value;
                        }
                    }
                }
                Err(error) if error.kind() == ErrorKind::WouldBlock => break,
                // Transient receive errors fall back to the cached value,
                // same as an empty queue; never stall a frame.
                Err(_) => break,
            }
        }

        self.last_received
    }
}
