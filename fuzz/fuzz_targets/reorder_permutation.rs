use honggfuzz::fuzz;
use organpipe::{organ_pipe, strip_terminator};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let tokens: Vec<Vec<u8>> = data
                .split(|&b| b == b'\n')
                .map(|line| strip_terminator(line.to_vec()))
                .collect();

            let reordered = organ_pipe(tokens.clone());
            assert_eq!(reordered.len(), tokens.len());

            let mut out: Vec<Vec<u8>> = reordered.into_iter().collect();
            let mut expected = tokens;
            out.sort();
            expected.sort();
            assert_eq!(out, expected);
        });
    }
}
