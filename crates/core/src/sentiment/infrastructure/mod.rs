pub mod lexicon_sentiment_analyzer;
