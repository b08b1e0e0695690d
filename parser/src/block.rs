//! Pull-style block reader.
//!
//! A [`BlockReader`] is told how many bytes the next block holds
//! ([`schedule`](BlockReader::schedule)),
//! then polled ([`read`](BlockReader::read))
//! until the data source has delivered that many bytes.
//! Sources which are not ready yet
//! (end of data or [`WouldBlock`](std::io::ErrorKind::WouldBlock))
//! make `read` yield `None` without losing the bytes already buffered,
//! so the same block can be polled again later.
use crate::error::{ReadSourceSnafu, Result};
use snafu::ResultExt;
use std::io::{ErrorKind, Read};

/// The number of bytes requested from the source at once.
const CHUNK_SIZE: usize = 4096;

/// A reader of fixed-size blocks over a byte source.
#[derive(Debug)]
pub struct BlockReader<R> {
    source: R,
    buffer: Vec<u8>,
    block_size: usize,
    processed: u64,
}

impl<R> BlockReader<R>
where
    R: Read,
{
    /// Create a block reader over the given source.
    /// No block is scheduled at first.
    pub fn new(source: R) -> Self {
        BlockReader {
            source,
            buffer: Vec::new(),
            block_size: 0,
            processed: 0,
        }
    }

    /// Request the next `n` bytes as a block.
    pub fn schedule(&mut self, n: usize) {
        self.block_size = n;
    }

    /// The size of the block currently requested.
    pub fn scheduled(&self) -> usize {
        self.block_size
    }

    /// Retrieve the scheduled block,
    /// or `None` if the source does not have enough data yet.
    pub fn read(&mut self) -> Result<Option<Vec<u8>>> {
        let mut chunk = [0u8; CHUNK_SIZE];
        while self.buffer.len() < self.block_size {
            // the buffer only grows with the bytes actually delivered
            match self.source.read(&mut chunk) {
                Ok(0) => return Ok(None),
                Ok(count) => self.buffer.extend_from_slice(&chunk[..count]),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) if e.kind() == ErrorKind::WouldBlock => return Ok(None),
                Err(e) => return Err(e).context(ReadSourceSnafu),
            }
        }

        let rest = self.buffer.split_off(self.block_size);
        let block = std::mem::replace(&mut self.buffer, rest);
        self.processed += self.block_size as u64;
        self.block_size = 0;
        Ok(Some(block))
    }

    /// The total number of bytes delivered in blocks so far.
    pub fn processed_bytes(&self) -> u64 {
        self.processed
    }

    /// Retrieve the underlying source.
    /// Bytes read ahead but not delivered yet are lost.
    pub fn into_inner(self) -> R {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::BlockReader;
    use std::io::{self, Read};

    /// Source delivering its data in chunks,
    /// pretending to block in between.
    struct Trickle {
        chunks: Vec<Vec<u8>>,
        ready: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.ready {
                self.ready = true;
                return Err(io::ErrorKind::WouldBlock.into());
            }
            self.ready = false;
            if self.chunks.is_empty() {
                return Ok(0);
            }
            let chunk = self.chunks.remove(0);
            assert!(chunk.len() <= buf.len());
            buf[..chunk.len()].copy_from_slice(&chunk);
            Ok(chunk.len())
        }
    }

    #[test]
    fn read_blocks_in_sequence() {
        let data: &[u8] = &[1, 2, 3, 4, 5, 6, 7];
        let mut reader = BlockReader::new(data);

        reader.schedule(3);
        assert_eq!(reader.read().unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(reader.processed_bytes(), 3);

        reader.schedule(0);
        assert_eq!(reader.read().unwrap(), Some(vec![]));

        reader.schedule(4);
        assert_eq!(reader.read().unwrap(), Some(vec![4, 5, 6, 7]));
        assert_eq!(reader.processed_bytes(), 7);

        reader.schedule(1);
        assert_eq!(reader.read().unwrap(), None);
        assert_eq!(reader.processed_bytes(), 7);
    }

    #[test]
    fn starving_source_resumes() {
        let source = Trickle {
            chunks: vec![vec![1, 2], vec![3], vec![4, 5]],
            ready: false,
        };
        let mut reader = BlockReader::new(source);
        reader.schedule(4);

        let mut polls = 0;
        let block = loop {
            polls += 1;
            if let Some(block) = reader.read().unwrap() {
                break block;
            }
            assert!(polls < 10, "block never completed");
        };
        assert_eq!(block, vec![1, 2, 3, 4]);
        assert_eq!(reader.processed_bytes(), 4);

        reader.schedule(1);
        let mut rest = None;
        for _ in 0..4 {
            rest = reader.read().unwrap();
            if rest.is_some() {
                break;
            }
        }
        assert_eq!(rest, Some(vec![5]));
    }

    #[test]
    fn huge_block_does_not_allocate_ahead() {
        let data = vec![0x55u8; 100];
        let mut reader = BlockReader::new(&data[..]);
        reader.schedule(0xFFFF_FFFE);
        assert_eq!(reader.read().unwrap(), None);
        assert_eq!(reader.buffer.len(), 100);
        assert!(reader.buffer.capacity() < 1 << 20);
        assert_eq!(reader.processed_bytes(), 0);
    }
}
