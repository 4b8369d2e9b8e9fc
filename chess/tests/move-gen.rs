//! Tests the move generator against community perft reference values
//
//  Copyright 2022 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////

mod move_gen {
    use chess::variations;
    use chess::Position;

    #[test]
    fn starting_position() {
        assert_eq!(
            count("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 5),
            4865609
        );
    }

    mod kiwipete {
        use super::count;

        #[test]
        fn depth_4() {
            assert_eq!(
                count("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 4),
                4085603
            );
        }

        #[test]
        #[ignore]
        fn depth_5() {
            assert_eq!(
                count("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 5),
                193690690
            );
        }
    }

    #[test]
    fn endgame_with_pins_and_en_passant() {
        assert_eq!(count("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -", 5), 674624);
    }

    #[test]
    fn promotion_heavy_middlegame() {
        assert_eq!(
            count("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1", 4),
            422333
        );
    }

    #[test]
    fn talkchess_position() {
        assert_eq!(
            count("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8", 4),
            2103487
        );
    }

    #[test]
    fn steven_edwards_alternative() {
        assert_eq!(
            count("r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10", 4),
            3894594
        );
    }

    #[test]
    fn position_007() { assert_eq!(count("4k3/8/8/8/8/8/8/4K2R w K - 0 1", 6), 764643); }

    #[test]
    fn position_008() { assert_eq!(count("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1", 6), 846648); }

    #[test]
    fn position_009() { assert_eq!(count("4k2r/8/8/8/8/8/8/4K3 w k - 0 1", 6), 899442); }

    #[test]
    fn position_010() { assert_eq!(count("r3k3/8/8/8/8/8/8/4K3 w q - 0 1", 6), 1001523); }

    #[test]
    fn position_011() { assert_eq!(count("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", 6), 2788982); }

    #[test]
    fn position_012() { assert_eq!(count("r3k2r/8/8/8/8/8/8/4K3 w kq - 0 1", 6), 3517770); }

    #[test]
    fn position_013() { assert_eq!(count("8/8/8/8/8/8/6k1/4K2R w K - 0 1", 6), 185867); }

    #[test]
    fn position_014() { assert_eq!(count("8/8/8/8/8/8/1k6/R3K3 w Q - 0 1", 6), 413018); }

    #[test]
    fn position_015() { assert_eq!(count("4k2r/6K1/8/8/8/8/8/8 w k - 0 1", 6), 179869); }

    #[test]
    fn position_016() { assert_eq!(count("r3k3/1K6/8/8/8/8/8/8 w q - 0 1", 6), 367724); }

    #[test]
    fn position_017() { assert_eq!(count("4k3/8/8/8/8/8/8/4K2R b K - 0 1", 6), 899442); }

    #[test]
    fn position_018() { assert_eq!(count("4k3/8/8/8/8/8/8/R3K3 b Q - 0 1", 6), 1001523); }

    #[test]
    fn position_019() { assert_eq!(count("4k2r/8/8/8/8/8/8/4K3 b k - 0 1", 6), 764643); }

    #[test]
    fn position_020() { assert_eq!(count("r3k3/8/8/8/8/8/8/4K3 b q - 0 1", 6), 846648); }

    #[test]
    fn position_021() { assert_eq!(count("4k3/8/8/8/8/8/8/R3K2R b KQ - 0 1", 6), 3517770); }

    #[test]
    fn position_022() { assert_eq!(count("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1", 6), 2788982); }

    #[test]
    fn position_023() { assert_eq!(count("8/8/8/8/8/8/6k1/4K2R b K - 0 1", 6), 179869); }

    #[test]
    fn position_024() { assert_eq!(count("8/8/8/8/8/8/1k6/R3K3 b Q - 0 1", 6), 367724); }

    #[test]
    fn position_025() { assert_eq!(count("4k2r/6K1/8/8/8/8/8/8 b k - 0 1", 6), 185867); }

    #[test]
    fn position_026() { assert_eq!(count("r3k3/1K6/8/8/8/8/8/8 b q - 0 1", 6), 413018); }

    #[test]
    fn position_027() { assert_eq!(count("8/1n4N1/2k5/8/8/5K2/1N4n1/8 w - - 0 1", 6), 8107539); }

    #[test]
    fn position_028() { assert_eq!(count("8/1k6/8/5N2/8/4n3/8/2K5 w - - 0 1", 6), 2594412); }

    #[test]
    fn position_029() { assert_eq!(count("K7/8/2n5/1n6/8/8/8/k6N w - - 0 1", 6), 588695); }

    #[test]
    fn position_030() { assert_eq!(count("k7/8/2N5/1N6/8/8/8/K6n w - - 0 1", 6), 688780); }

    #[test]
    fn position_031() { assert_eq!(count("8/1n4N1/2k5/8/8/5K2/1N4n1/8 b - - 0 1", 6), 8503277); }

    #[test]
    fn position_032() { assert_eq!(count("8/1k6/8/5N2/8/4n3/8/2K5 b - - 0 1", 6), 3147566); }

    #[test]
    fn position_033() { assert_eq!(count("8/8/3K4/3Nn3/3nN3/4k3/8/8 b - - 0 1", 6), 4405103); }

    #[test]
    fn position_034() { assert_eq!(count("K7/8/2n5/1n6/8/8/8/k6N b - - 0 1", 6), 688780); }

    #[test]
    fn position_035() { assert_eq!(count("k7/8/2N5/1N6/8/8/8/K6n b - - 0 1", 6), 588695); }

    #[test]
    fn position_036() { assert_eq!(count("6kq/8/8/8/8/8/8/7K w - - 0 1", 6), 391507); }

    #[test]
    fn position_037() { assert_eq!(count("6KQ/8/8/8/8/8/8/7k b - - 0 1", 6), 391507); }

    #[test]
    fn position_038() { assert_eq!(count("K7/8/8/3Q4/4q3/8/8/7k w - - 0 1", 6), 3370175); }

    #[test]
    fn position_039() { assert_eq!(count("6qk/8/8/8/8/8/8/7K b - - 0 1", 6), 419369); }

    #[test]
    fn position_040() { assert_eq!(count("K7/8/8/3Q4/4q3/8/8/7k b - - 0 1", 6), 3370175); }

    #[test]
    fn position_041() { assert_eq!(count("8/8/8/8/8/K7/P7/k7 w - - 0 1", 6), 6249); }

    #[test]
    fn position_042() { assert_eq!(count("8/8/8/8/8/7K/7P/7k w - - 0 1", 6), 6249); }

    #[test]
    fn position_043() { assert_eq!(count("K7/p7/k7/8/8/8/8/8 w - - 0 1", 6), 2343); }

    #[test]
    fn position_044() { assert_eq!(count("7K/7p/7k/8/8/8/8/8 w - - 0 1", 6), 2343); }

    #[test]
    fn position_045() { assert_eq!(count("8/2k1p3/3pP3/3P2K1/8/8/8/8 w - - 0 1", 6), 34834); }

    #[test]
    fn position_046() { assert_eq!(count("8/8/8/8/8/K7/P7/k7 b - - 0 1", 6), 2343); }

    #[test]
    fn position_047() { assert_eq!(count("K7/p7/k7/8/8/8/8/8 b - - 0 1", 6), 6249); }

    #[test]
    fn position_048() { assert_eq!(count("8/2k1p3/3pP3/3P2K1/8/8/8/8 b - - 0 1", 6), 34822); }

    #[test]
    fn position_049() { assert_eq!(count("8/8/8/8/8/4k3/4P3/4K3 w - - 0 1", 6), 11848); }

    #[test]
    fn position_050() { assert_eq!(count("4k3/4p3/4K3/8/8/8/8/8 b - - 0 1", 6), 11848); }

    #[test]
    fn position_051() { assert_eq!(count("8/8/7k/7p/7P/7K/8/8 w - - 0 1", 6), 10724); }

    #[test]
    fn position_052() { assert_eq!(count("8/8/k7/p7/P7/K7/8/8 w - - 0 1", 6), 10724); }

    #[test]
    fn position_053() { assert_eq!(count("8/8/3k4/3p4/3P4/3K4/8/8 w - - 0 1", 6), 53138); }

    #[test]
    fn position_054() { assert_eq!(count("8/3k4/3p4/8/3P4/3K4/8/8 w - - 0 1", 6), 157093); }

    #[test]
    fn position_055() { assert_eq!(count("8/8/3k4/3p4/8/3P4/3K4/8 w - - 0 1", 6), 158065); }

    #[test]
    fn position_056() { assert_eq!(count("k7/8/3p4/8/3P4/8/8/7K w - - 0 1", 6), 20960); }

    #[test]
    fn position_057() { assert_eq!(count("7k/3p4/8/8/3P4/8/8/K7 w - - 0 1", 6), 32191); }

    #[test]
    fn position_058() { assert_eq!(count("7k/8/8/3p4/8/8/3P4/K7 w - - 0 1", 6), 30980); }

    #[test]
    fn position_059() { assert_eq!(count("k7/8/8/7p/6P1/8/8/K7 w - - 0 1", 6), 41874); }

    #[test]
    fn position_060() { assert_eq!(count("k7/8/7p/8/8/6P1/8/K7 w - - 0 1", 6), 29679); }

    #[test]
    fn position_061() { assert_eq!(count("8/Pk6/8/8/8/8/6Kp/8 w - - 0 1", 6), 1030499); }

    #[test]
    fn position_062() { assert_eq!(count("8/Pk6/8/8/8/8/6Kp/8 b - - 0 1", 6), 1030499); }

    fn count(fen: &str, depth: usize) -> u64 {
        println!("\n{}", fen);
        let mut pos: Position = fen.parse().unwrap();

        let count = variations::print(&mut pos, depth);
        println!("Depth {} total:\t{:12}", depth, count);

        count
    }
}
