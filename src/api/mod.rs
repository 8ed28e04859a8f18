pub mod codechef;
pub mod codeforces;
pub mod fetcher;
pub mod leetcode;
