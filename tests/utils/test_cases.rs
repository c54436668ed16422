macro_rules! test_cases {
    ($variant:ident) => {
        mod $variant {
            mod body {
                mod compress {
                    use crate::utils::{
                        algos::$variant::{body, sync},
                        FromIterator, InputStream, Level,
                    };

                    #[test]
                    #[ntest::timeout(1000)]
                    fn empty() {
                        let input = InputStream::from(vec![]);

                        let compressed = body::compress(&input);
                        let output = sync::decompress(&compressed);

                        assert_eq!(output, &[][..]);
                    }

                    #[test]
                    #[ntest::timeout(1000)]
                    fn empty_chunk() {
                        let input = InputStream::from(vec![vec![]]);

                        let compressed = body::compress(&input);
                        let output = sync::decompress(&compressed);

                        assert_eq!(output, input.bytes());
                    }

                    #[test]
                    #[ntest::timeout(1000)]
                    fn short() {
                        let input = InputStream::from([[1, 2, 3], [4, 5, 6]]);

                        let compressed = body::compress(&input);
                        let output = sync::decompress(&compressed);

                        assert_eq!(output, &[1, 2, 3, 4, 5, 6][..]);
                    }

                    #[test]
                    #[ntest::timeout(1000)]
                    fn long() {
                        let input = InputStream::from(vec![
                            Vec::from_iter((0..32_768).map(|_| rand::random())),
                            Vec::from_iter((0..32_768).map(|_| rand::random())),
                        ]);

                        let compressed = body::compress(&input);
                        let output = sync::decompress(&compressed);

                        assert_eq!(output, input.bytes());
                    }

                    #[test]
                    #[ntest::timeout(1000)]
                    fn one_chunk_per_input_chunk_plus_trailer() {
                        let input = InputStream::from(vec![vec![1; 10], vec![], vec![2; 10]]);

                        let chunks = body::to_chunks(deflate_body::Deflate::with_encoding(
                            input.body(),
                            body::ENCODING,
                            Level::Default,
                        ));

                        assert_eq!(chunks.len(), input.non_empty().len() + 1);
                        assert!(chunks.iter().all(|chunk| !chunk.is_empty()));
                        assert_eq!(sync::decompress(&chunks.concat()), input.bytes());
                    }

                    #[test]
                    fn with_level_best() {
                        let input = InputStream::from([[1, 2, 3], [4, 5, 6]]);

                        let compressed = body::compress_with_level(&input, Level::Best);
                        let output = sync::decompress(&compressed);

                        assert_eq!(output, &[1, 2, 3, 4, 5, 6][..]);
                    }

                    #[test]
                    fn with_level_default() {
                        let input = InputStream::from([[1, 2, 3], [4, 5, 6]]);

                        let compressed = body::compress_with_level(&input, Level::default());
                        let output = sync::decompress(&compressed);

                        assert_eq!(output, &[1, 2, 3, 4, 5, 6][..]);
                    }

                    #[test]
                    fn with_level_0() {
                        let input = InputStream::from([[1, 2, 3], [4, 5, 6]]);

                        let compressed = body::compress_with_level(&input, Level::Precise(0));
                        let output = sync::decompress(&compressed);

                        assert_eq!(output, &[1, 2, 3, 4, 5, 6][..]);
                    }

                    #[test]
                    fn with_level_max() {
                        let input = InputStream::from([[1, 2, 3], [4, 5, 6]]);

                        let compressed =
                            body::compress_with_level(&input, Level::Precise(u32::MAX));
                        let output = sync::decompress(&compressed);

                        assert_eq!(output, &[1, 2, 3, 4, 5, 6][..]);
                    }

                    #[test]
                    #[ntest::timeout(1000)]
                    fn with_window_bits() {
                        let input = InputStream::from(vec![
                            Vec::from_iter((0..4_096).map(|i| (i % 251) as u8)),
                            Vec::from_iter((0..4_096).map(|_| rand::random())),
                        ]);

                        for window_bits in body::WINDOW_BITS {
                            let compressed = body::compress_with_window_bits(&input, window_bits);
                            let output = sync::decompress(&compressed);

                            assert_eq!(output, input.bytes(), "window bits {}", window_bits);
                        }
                    }

                    #[test]
                    fn window_bits_select_the_encoding() {
                        for window_bits in body::WINDOW_BITS {
                            assert_eq!(
                                deflate_body::Encoding::classify(window_bits),
                                body::ENCODING
                            );
                        }
                        assert_eq!(
                            deflate_body::Encoding::classify(body::ENCODING.window_bits()),
                            body::ENCODING
                        );
                    }
                }
            }
        }
    };
}
